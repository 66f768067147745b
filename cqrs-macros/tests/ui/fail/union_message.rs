use cqrs_bus::Command;

#[allow(dead_code)]
#[derive(Command)]
union Bits {
    a: u32,
    b: f32,
}

fn main() {}
