use cqrs_bus::Command;

#[allow(dead_code)]
#[derive(Command)]
#[command(outptu = u8)]
struct Ping;

fn main() {}
