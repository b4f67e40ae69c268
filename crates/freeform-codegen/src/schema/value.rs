/// A literal `default = ...` value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DefaultValue {
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
}

impl DefaultValue {
    pub(crate) fn from_ast(expr: &syn::Expr) -> syn::Result<Self> {
        match expr {
            syn::Expr::Lit(lit) => Self::from_lit(&lit.lit, false),
            syn::Expr::Unary(syn::ExprUnary {
                op: syn::UnOp::Neg(_),
                expr: inner,
                ..
            }) => match &**inner {
                syn::Expr::Lit(lit) => Self::from_lit(&lit.lit, true),
                _ => Err(unsupported(expr)),
            },
            syn::Expr::Group(group) => Self::from_ast(&group.expr),
            _ => Err(unsupported(expr)),
        }
    }

    fn from_lit(lit: &syn::Lit, negate: bool) -> syn::Result<Self> {
        match lit {
            syn::Lit::Bool(lit) if !negate => Ok(Self::Bool(lit.value)),
            syn::Lit::Str(lit) if !negate => Ok(Self::String(lit.value())),
            syn::Lit::Int(lit) => {
                let value = lit.base10_parse::<i64>()?;
                Ok(Self::I64(if negate { -value } else { value }))
            }
            syn::Lit::Float(lit) => {
                let value = lit.base10_parse::<f64>()?;
                Ok(Self::F64(if negate { -value } else { value }))
            }
            _ => Err(syn::Error::new_spanned(
                lit,
                "default must be a boolean, integer, float or string literal",
            )),
        }
    }
}

fn unsupported(expr: &syn::Expr) -> syn::Error {
    syn::Error::new_spanned(expr, "default must be a literal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn literals() {
        let cases: [(syn::Expr, DefaultValue); 5] = [
            (parse_quote!(true), DefaultValue::Bool(true)),
            (parse_quote!(42), DefaultValue::I64(42)),
            (parse_quote!(-7), DefaultValue::I64(-7)),
            (parse_quote!(1.5), DefaultValue::F64(1.5)),
            (parse_quote!("draft"), DefaultValue::String("draft".to_string())),
        ];

        for (expr, expected) in cases {
            assert_eq!(DefaultValue::from_ast(&expr).unwrap(), expected);
        }
    }

    #[test]
    fn non_literals_are_rejected() {
        let expr: syn::Expr = parse_quote!(String::new());
        assert!(DefaultValue::from_ast(&expr).is_err());

        let expr: syn::Expr = parse_quote!(-"draft");
        assert!(DefaultValue::from_ast(&expr).is_err());
    }
}
