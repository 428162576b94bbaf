//! Field extraction for `#[derive(ResponsiveProps)]`.

use syn::{
    Data, DeriveInput, Error, Fields, GenericArgument, Ident, LitStr, PathArguments, Result,
    Type,
};

/// The responsive fields of a props struct.
#[derive(Debug)]
pub struct PropsStruct {
    pub fields: Vec<PropField>,
}

/// One `Option<Responsive<T>>` field.
#[derive(Debug)]
pub struct PropField {
    /// Field identifier, used to read the value.
    pub ident: Ident,
    /// Prop name handed to the emitter (field name unless renamed).
    pub prop_name: String,
}

impl PropsStruct {
    pub fn from_derive(input: &DeriveInput) -> Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(Error::new_spanned(
                &input.ident,
                "ResponsiveProps can only be derived for structs",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(Error::new_spanned(
                &input.ident,
                "ResponsiveProps requires named fields",
            ));
        };

        let mut fields = Vec::new();
        for field in &named.named {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            if !is_optional_responsive(&field.ty) {
                continue;
            }

            let mut skip = false;
            let mut rename = None;
            for attr in &field.attrs {
                if !attr.path().is_ident("responsive") {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        skip = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        let name: LitStr = meta.value()?.parse()?;
                        rename = Some(name.value());
                        Ok(())
                    } else {
                        Err(meta.error("expected `skip` or `rename = \"...\"`"))
                    }
                })?;
            }

            if !skip {
                let prop_name = rename.unwrap_or_else(|| ident.to_string());
                fields.push(PropField { ident, prop_name });
            }
        }

        Ok(Self { fields })
    }
}

/// Matches `Option<Responsive<..>>`, by last path segment.
fn is_optional_responsive(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident != "Option" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    args.args.iter().any(|arg| match arg {
        GenericArgument::Type(Type::Path(inner)) => inner
            .path
            .segments
            .last()
            .is_some_and(|s| s.ident == "Responsive"),
        _ => false,
    })
}
