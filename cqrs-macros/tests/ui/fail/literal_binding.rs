use cqrs_bus::Command;

#[allow(dead_code)]
#[derive(Command)]
#[handled_by(42)]
struct Ping;

fn main() {}
