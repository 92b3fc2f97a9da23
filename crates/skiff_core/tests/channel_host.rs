use skiff_core::{
    ChannelError, ChannelValue, MethodCall, MethodChannelHost, MethodError, MethodReply,
};

fn fixed_reply(reply: MethodReply) -> impl Fn(&MethodCall) -> MethodReply + Send + Sync {
    move |_call: &MethodCall| reply.clone()
}

#[test]
fn host_routes_calls_to_the_right_channel() {
    let mut host = MethodChannelHost::new();
    host.register_handler("skiff/alpha", fixed_reply(MethodReply::Success(ChannelValue::Int(1))))
        .expect("register alpha");
    host.register_handler("skiff/beta", fixed_reply(MethodReply::Success(ChannelValue::Int(2))))
        .expect("register beta");

    let call = MethodCall::without_arguments("read");
    assert_eq!(
        host.dispatch("skiff/alpha", &call),
        MethodReply::Success(ChannelValue::Int(1))
    );
    assert_eq!(
        host.dispatch("skiff/beta", &call),
        MethodReply::Success(ChannelValue::Int(2))
    );
}

#[test]
fn handler_replies_pass_through_unchanged() {
    let mut host = MethodChannelHost::new();
    let error_reply = MethodReply::Error(
        MethodError::new("unavailable", "backing service is offline")
            .with_details(ChannelValue::string("retry later")),
    );
    host.register_handler("skiff/errors", fixed_reply(error_reply.clone()))
        .expect("register");

    let reply = host.dispatch("skiff/errors", &MethodCall::without_arguments("read"));
    assert_eq!(reply, error_reply);
}

#[test]
fn unbound_channel_is_a_normal_not_implemented_outcome() {
    let host = MethodChannelHost::new();
    let reply = host.dispatch(
        "plugins.flutter.io/shared_preferences",
        &MethodCall::without_arguments("getAll"),
    );
    assert_eq!(reply, MethodReply::NotImplemented);
}

#[test]
fn registration_is_single_assignment_per_channel() {
    let mut host = MethodChannelHost::new();
    host.register_handler("skiff/alpha", fixed_reply(MethodReply::NotImplemented))
        .expect("first registration");

    let err = host
        .register_handler("skiff/alpha", fixed_reply(MethodReply::NotImplemented))
        .expect_err("second registration must fail");
    assert_eq!(
        err,
        ChannelError::HandlerAlreadyInstalled("skiff/alpha".to_string())
    );
    assert_eq!(host.len(), 1);
}

#[test]
fn invalid_names_are_rejected_at_registration_only() {
    let mut host = MethodChannelHost::new();

    for name in ["", "Upper/case", "a//b", "trailing/", "/leading", "sp ace"] {
        let err = host
            .register_handler(name, fixed_reply(MethodReply::NotImplemented))
            .expect_err("invalid name must fail");
        assert_eq!(err, ChannelError::InvalidChannelName(name.to_string()));
    }

    // Dispatch stays total even for names that could never register.
    let reply = host.dispatch("Upper/case", &MethodCall::without_arguments("x"));
    assert_eq!(reply, MethodReply::NotImplemented);
}

#[test]
fn arguments_reach_handlers_unmodified() {
    let mut host = MethodChannelHost::new();
    host.register_handler("skiff/echo", |call: &MethodCall| {
        MethodReply::Success(call.arguments.clone())
    })
    .expect("register echo");

    let payload = ChannelValue::List(vec![
        ChannelValue::Int(1),
        ChannelValue::string("two"),
        ChannelValue::Bool(true),
    ]);
    let reply = host.dispatch("skiff/echo", &MethodCall::new("echo", payload.clone()));
    assert_eq!(reply, MethodReply::Success(payload));
}
