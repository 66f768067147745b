use cqrs_bus::Command;

#[allow(dead_code)]
#[derive(Command)]
#[command(output = u8, output = u16)]
struct Ping;

fn main() {}
