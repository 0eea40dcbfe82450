//! Attribute parsing for the Record derive macro.
//!
//! This module provides the parser for the `#[csv(...)]` field attribute.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[csv(...)]`.
#[derive(Debug, Clone)]
pub struct CsvAttr {
    /// Column name override: `rename = "Due Date"`. `"-"` excludes the column.
    pub rename: Option<String>,
    /// Leave the field out of the record entirely: `skip`
    pub skip: bool,
    /// Format through `Display` instead of the `Field` trait: `display`
    pub display: bool,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for CsvAttr {
    fn default() -> Self {
        CsvAttr {
            rename: None,
            skip: false,
            display: false,
            span: Span::call_site(),
        }
    }
}

impl Parse for CsvAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = CsvAttr {
            span: input.span(),
            ..CsvAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // skip (flag)
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                }

                // display (flag)
                Meta::Path(p) if p.is_ident("display") => {
                    attr.display = true;
                }

                // rename = "Header" (also accepted as name = "Header")
                Meta::NameValue(nv) if nv.path.is_ident("rename") || nv.path.is_ident("name") => {
                    attr.rename = Some(parse_string_expr(&nv.value)?);
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown csv attribute: expected one of: rename = \"...\", skip, display",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Parse a string from an expression.
fn parse_string_expr(expr: &Expr) -> Result<String> {
    if let Expr::Lit(ExprLit {
        lit: Lit::Str(lit_str),
        ..
    }) = expr
    {
        return Ok(lit_str.value());
    }
    Err(Error::new(expr.span(), "expected string literal"))
}

/// Extract `#[csv(...)]` attributes from a field's attributes.
pub fn parse_csv_attrs(attrs: &[Attribute]) -> Result<CsvAttr> {
    for attr in attrs {
        if attr.path().is_ident("csv") {
            return attr.parse_args::<CsvAttr>();
        }
    }
    Ok(CsvAttr::default())
}
