use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Attribute, Ident, LitStr, Path, Result as SynResult, Token, Type, parse::Parse,
    parse::ParseStream,
};

/// `#[command(...)]` / `#[query(...)]` 的解析结果
#[derive(Default)]
pub(crate) struct MessageAttrConfig {
    pub(crate) output: Option<Type>,
    pub(crate) error: Option<Type>,
    pub(crate) name: Option<LitStr>,
}

impl MessageAttrConfig {
    /// 合并同名属性中的全部键；同一个键只能出现一次
    pub(crate) fn from_attrs(attrs: &[Attribute], attr_name: &str) -> SynResult<Self> {
        let mut cfg = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(attr_name)) {
            let pairs =
                attr.parse_args_with(Punctuated::<MessageAttrKv, Token![,]>::parse_terminated)?;

            for kv in pairs {
                match kv {
                    MessageAttrKv::Output(key, ty) => set_once(&mut cfg.output, &key, ty)?,
                    MessageAttrKv::Error(key, ty) => set_once(&mut cfg.error, &key, ty)?,
                    MessageAttrKv::Name(key, lit) => set_once(&mut cfg.name, &key, lit)?,
                }
            }
        }

        Ok(cfg)
    }
}

fn set_once<T>(slot: &mut Option<T>, key: &Ident, value: T) -> SynResult<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            key.span(),
            format!("duplicate key '{key}' in attribute"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

enum MessageAttrKv {
    Output(Ident, Type),
    Error(Ident, Type),
    Name(Ident, LitStr),
}

impl Parse for MessageAttrKv {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let key: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;

        match key.to_string().as_str() {
            "output" => Ok(Self::Output(key, input.parse()?)),
            "error" => Ok(Self::Error(key, input.parse()?)),
            "name" => Ok(Self::Name(key, input.parse()?)),
            _ => Err(syn::Error::new(
                key.span(),
                "unknown key; expected 'output' | 'error' | 'name'",
            )),
        }
    }
}

/// 收集全部 `#[handled_by(...)]` 中的处理器标识（保持声明顺序，不去重）
pub(crate) fn handled_by(attrs: &[Attribute]) -> SynResult<Vec<LitStr>> {
    let mut handlers = Vec::new();

    for attr in attrs.iter().filter(|a| a.path().is_ident("handled_by")) {
        let list = attr.parse_args_with(Punctuated::<HandlerRef, Token![,]>::parse_terminated)?;
        if list.is_empty() {
            return Err(syn::Error::new(
                attr.path().span(),
                "#[handled_by] expects at least one handler, e.g. #[handled_by(PingHandler)]",
            ));
        }
        handlers.extend(list.into_iter().map(|h| h.0));
    }

    Ok(handlers)
}

// 处理器引用：字符串字面量原样使用；路径按书写拼接为 `a::b::C`
struct HandlerRef(LitStr);

impl Parse for HandlerRef {
    fn parse(input: ParseStream) -> SynResult<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(
                    lit.span(),
                    "handler identifier must not be empty",
                ));
            }
            return Ok(Self(lit));
        }
        if input.peek(syn::Lit) {
            return Err(input.error("expected a handler path or string literal"));
        }

        let path: Path = input.parse()?;
        Ok(Self(path_identifier(&path)?))
    }
}

fn path_identifier(path: &Path) -> SynResult<LitStr> {
    let mut segments = Vec::with_capacity(path.segments.len());
    for seg in path.segments.iter() {
        if !seg.arguments.is_empty() {
            return Err(syn::Error::new(
                seg.arguments.span(),
                "generic arguments are not supported here; use a string literal identifier",
            ));
        }
        segments.push(seg.ident.to_string());
    }

    let mut id = segments.join("::");
    if path.leading_colon.is_some() {
        id.insert_str(0, "::");
    }
    Ok(LitStr::new(&id, path.span()))
}
