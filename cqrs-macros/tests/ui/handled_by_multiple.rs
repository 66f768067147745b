use cqrs_bus::Command;
use cqrs_bus::message::Message;

// 多个声明全部保留，合法性在分发时才校验
#[derive(Command)]
#[handled_by(FirstHandler, "second::Handler")]
#[handled_by(::absolute::ThirdHandler)]
struct Spread;

#[derive(Command)]
#[handled_by(SameHandler)]
#[handled_by(SameHandler)]
struct Twice;

fn main() {
    assert_eq!(
        Spread::HANDLED_BY,
        &["FirstHandler", "second::Handler", "::absolute::ThirdHandler"]
    );
    assert_eq!(Twice::HANDLED_BY.len(), 2);
}
