use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod message;

use message::MessageKind;

/// 命令派生宏
/// - 为目标类型实现 `::cqrs_bus::message::Message` 与 `::cqrs_bus::command::Command`
/// - `#[handled_by(Handler)]` / `#[handled_by("path::Handler")]` 声明处理器，可重复
/// - 可选参数：`#[command(output = T, error = E, name = "...")]`，
///   默认 `output = ()`、`error = ::cqrs_bus::AppError`、`name` 为类型名
#[proc_macro_derive(Command, attributes(command, handled_by))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    message::expand(input, MessageKind::Command)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 查询派生宏
/// - 为目标类型实现 `::cqrs_bus::message::Message` 与 `::cqrs_bus::query::Query`
/// - 必须指定返回类型：`#[query(output = T)]`；`error` / `name` 同命令
#[proc_macro_derive(Query, attributes(query, handled_by))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    message::expand(input, MessageKind::Query)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
