//! 处理器绑定查找
//!
//! 读取消息类型上声明的 `HANDLED_BY`，要求恰好一个。只看类型本身，不做任何推断。
use crate::error::BindingError;
use crate::message::{Message, MessageKind};
use std::any::type_name;

/// 消息类型声明的全部处理器标识（按声明顺序）
pub fn declared_bindings<M: Message>() -> &'static [&'static str] {
    M::HANDLED_BY
}

/// 解析消息类型唯一的处理器标识
///
/// `kind` 仅影响报错措辞（"Command" / "Query"）。
pub fn resolve_binding<M: Message>(kind: MessageKind) -> Result<&'static str, BindingError> {
    match declared_bindings::<M>() {
        [handler] => Ok(*handler),
        [] => Err(BindingError::Missing {
            kind,
            message: type_name::<M>(),
        }),
        many => Err(BindingError::Ambiguous {
            kind,
            message: type_name::<M>(),
            found: many.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    struct Bound;
    impl Message for Bound {
        const NAME: &'static str = "Bound";
        const HANDLED_BY: &'static [&'static str] = &["BoundHandler"];
        type Output = ();
        type Error = AppError;
    }

    struct Unbound;
    impl Message for Unbound {
        const NAME: &'static str = "Unbound";
        type Output = ();
        type Error = AppError;
    }

    struct Twice;
    impl Message for Twice {
        const NAME: &'static str = "Twice";
        const HANDLED_BY: &'static [&'static str] = &["TwiceHandler", "TwiceHandler"];
        type Output = ();
        type Error = AppError;
    }

    #[test]
    fn single_binding_resolves() {
        assert_eq!(
            resolve_binding::<Bound>(MessageKind::Command),
            Ok("BoundHandler")
        );
    }

    #[test]
    fn missing_binding_names_the_type() {
        let err = resolve_binding::<Unbound>(MessageKind::Query).unwrap_err();
        assert!(matches!(err, BindingError::Missing { kind: MessageKind::Query, .. }));
        assert!(err.to_string().contains("Unbound"));
        assert!(err.to_string().starts_with("Query "));
    }

    #[test]
    fn duplicate_declarations_are_ambiguous() {
        let err = resolve_binding::<Twice>(MessageKind::Command).unwrap_err();
        assert!(matches!(err, BindingError::Ambiguous { found: 2, .. }));
        assert!(err.to_string().contains("Twice"));
        assert!(err.to_string().contains("must have exactly one"));
    }

    #[test]
    fn declared_bindings_keep_order() {
        assert_eq!(declared_bindings::<Twice>(), &["TwiceHandler", "TwiceHandler"]);
        assert!(declared_bindings::<Unbound>().is_empty());
    }

    #[cfg(feature = "derive")]
    #[test]
    fn derived_declarations_are_read() {
        #[allow(dead_code)]
        #[derive(crate::Query)]
        #[query(output = u64)]
        #[handled_by(reports::CountHandler)]
        struct CountReports;

        #[allow(dead_code)]
        #[derive(crate::Command)]
        #[handled_by(FirstHandler, "second::Handler")]
        struct Archive;

        assert_eq!(
            resolve_binding::<CountReports>(MessageKind::Query),
            Ok("reports::CountHandler")
        );
        assert_eq!(
            resolve_binding::<Archive>(MessageKind::Command),
            Err(BindingError::Ambiguous {
                kind: MessageKind::Command,
                message: std::any::type_name::<Archive>(),
                found: 2,
            })
        );
    }
}
