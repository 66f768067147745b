use cqrs_bus::Command;

#[allow(dead_code)]
#[derive(Command)]
#[handled_by("")]
struct Ping;

fn main() {}
