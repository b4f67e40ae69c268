use quote::ToTokens;

/// A field's Rust type, reduced to what the type registry understands.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Hint {
    /// The last path segment and its generic type arguments
    Named { name: String, args: Vec<Hint> },

    /// Anything that is not a plain type path; kept as source text
    Opaque(String),
}

impl Hint {
    /// Lowers `ty`, replacing `Self` with the model's name.
    pub(crate) fn from_ast(ty: &syn::Type, model_ident: &syn::Ident) -> Self {
        match ty {
            syn::Type::Path(path) if path.qself.is_none() => {
                let Some(segment) = path.path.segments.last() else {
                    return Self::opaque(ty);
                };

                let name = if segment.ident == "Self" {
                    model_ident.to_string()
                } else {
                    segment.ident.to_string()
                };

                let args = match &segment.arguments {
                    syn::PathArguments::None => vec![],
                    syn::PathArguments::AngleBracketed(generic) => generic
                        .args
                        .iter()
                        .filter_map(|arg| match arg {
                            syn::GenericArgument::Type(ty) => Some(Self::from_ast(ty, model_ident)),
                            // Lifetimes do not change how a value is stored
                            _ => None,
                        })
                        .collect(),
                    syn::PathArguments::Parenthesized(_) => return Self::opaque(ty),
                };

                Self::Named { name, args }
            }
            syn::Type::Paren(paren) => Self::from_ast(&paren.elem, model_ident),
            syn::Type::Group(group) => Self::from_ast(&group.elem, model_ident),
            _ => Self::opaque(ty),
        }
    }

    fn opaque(ty: &syn::Type) -> Self {
        Self::Opaque(source_text(&ty.to_token_stream().to_string()))
    }
}

/// Tightens printed tokens to the way the type is written in source.
///
/// Token printing pads punctuation with spaces, and how much depends on the
/// compiler. `( u32 , u32 )` and `(u32 , u32)` both become `(u32, u32)`.
fn source_text(printed: &str) -> String {
    let chars = printed.chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(printed.len());

    for (index, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = out.chars().last();
            let next = chars.get(index + 1).copied();

            let tight_after = matches!(prev, Some('(' | '[' | '<' | '&' | ':' | ' '));
            let tight_before = matches!(next, Some(',' | ';' | ')' | ']' | '>' | ':' | ' '))
                || (next == Some('<') && prev.is_some_and(|c| c.is_alphanumeric() || c == '_'));

            if tight_after || tight_before {
                continue;
            }
        }

        out.push(c);
    }

    out
}
