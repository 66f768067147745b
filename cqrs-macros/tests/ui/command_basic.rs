use cqrs_bus::message::Message;
use cqrs_bus::{AppError, Command};

#[derive(Command)]
#[handled_by(PingHandler)]
struct Ping;

#[derive(Command)]
#[command(output = String, name = "user.create")]
#[handled_by(handlers::CreateUserHandler)]
struct CreateUser {
    #[allow(dead_code)]
    name: String,
}

#[derive(Command)]
struct Unbound;

fn assert_command<C: cqrs_bus::command::Command<Error = AppError>>() {}

fn main() {
    assert_command::<Ping>();
    assert_command::<CreateUser>();
    assert_command::<Unbound>();

    assert_eq!(Ping::NAME, "Ping");
    assert_eq!(Ping::HANDLED_BY, &["PingHandler"]);

    assert_eq!(CreateUser::NAME, "user.create");
    assert_eq!(CreateUser::HANDLED_BY, &["handlers::CreateUserHandler"]);
    let _: <CreateUser as Message>::Output = String::new();
    let _: <Ping as Message>::Output = ();

    assert!(Unbound::HANDLED_BY.is_empty());
}
