use cqrs_bus::Command;

#[allow(dead_code)]
#[derive(Command)]
#[handled_by(GreetHandler)]
struct Greet<'a> {
    name: &'a str,
}

fn main() {}
