use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, ItemStruct};

fn int_arg(attr: &syn::Attribute) -> usize {
    attr.parse_args::<syn::LitInt>()
        .unwrap()
        .base10_parse::<usize>()
        .unwrap()
}

/// Turn a field list into a big-endian reader over a fixed-layout record.
///
/// Fields are laid out in declaration order. `#[bits(n)]` packs a `bool` or
/// `u8` field into the current byte, LSB first. `#[bytes(n)]` overrides the
/// width of an integer or `&[u8]` field (`u32` with `#[bytes(3)]` reads a
/// 24-bit value). Fields whose name contains `reserved` only take up space.
#[proc_macro_attribute]
pub fn record(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);

    let item_attr = input.attrs;
    let name = input.ident;

    let mut f = quote! {
        #(#item_attr)*
        pub struct #name<T: AsRef<[u8]>> {
            buffer: T,
        }
    };

    let mut impls = vec![];

    let mut offset = 0usize;
    let mut bits_offset = 0u32;

    for field in input.fields {
        let fnname = field.ident.unwrap();
        let ty = field.ty;
        let ty_name = ty.to_token_stream().to_string();

        let doc = field.attrs.iter().find(|attr| attr.path().is_ident("doc"));

        let bits = field
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("bits"))
            .map(int_arg);

        let bytes = field
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("bytes"))
            .map(int_arg)
            .or(match ty_name.as_str() {
                "bool" | "u8" | "i8" => Some(1),
                "u16" | "i16" => Some(2),
                "u32" | "i32" => Some(4),
                _ => None,
            });

        if !fnname.to_string().contains("reserved") {
            let getter = match (ty_name.as_str(), bits) {
                ("bool", _) => quote! {
                    (self.buffer.as_ref()[#offset] >> #bits_offset) & 0b1 != 0
                },
                ("u8", Some(bits)) => {
                    let mask = ((1u16 << bits) - 1) as u8;
                    quote! {
                        (self.buffer.as_ref()[#offset] >> #bits_offset) & #mask
                    }
                }
                ("u8", None) => quote! {
                    self.buffer.as_ref()[#offset]
                },
                ("i8", _) => quote! {
                    self.buffer.as_ref()[#offset] as i8
                },
                ("u16", _) => quote! {
                    let b = &self.buffer.as_ref()[#offset..];
                    u16::from_be_bytes([b[0], b[1]])
                },
                ("i16", _) => quote! {
                    let b = &self.buffer.as_ref()[#offset..];
                    i16::from_be_bytes([b[0], b[1]])
                },
                ("u32", _) if bytes == Some(3) => quote! {
                    let b = &self.buffer.as_ref()[#offset..];
                    u32::from_be_bytes([0, b[0], b[1], b[2]])
                },
                ("u32", _) => quote! {
                    let b = &self.buffer.as_ref()[#offset..];
                    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
                },
                ("i32", _) => quote! {
                    let b = &self.buffer.as_ref()[#offset..];
                    i32::from_be_bytes([b[0], b[1], b[2], b[3]])
                },
                ("& [u8]", _) => {
                    let len = bytes.expect("`&[u8]` fields need a #[bytes(n)] attribute");
                    quote! {
                        &self.buffer.as_ref()[#offset..][..#len]
                    }
                }
                (other, _) => panic!("unsupported record field type `{other}`"),
            };

            impls.push(quote! {
                #doc
                pub fn #fnname(&self) -> #ty {
                    #getter
                }
            });
        }

        match bits {
            Some(bits) => {
                bits_offset += bits as u32;
                if bits_offset >= 8 {
                    offset += 1;
                    bits_offset = 0;
                }
            }
            None => {
                if bits_offset != 0 {
                    offset += 1;
                    bits_offset = 0;
                }
                offset += bytes.unwrap_or(0);
            }
        }
    }

    if bits_offset != 0 {
        offset += 1;
    }

    f.extend(quote! {
        impl<T: AsRef<[u8]>> #name<T> {
            /// Create a new reader, checking that the buffer holds the whole
            /// record.
            pub fn new(buffer: T) -> crate::Result<Self> {
                let remaining = buffer.as_ref().len();
                if remaining < Self::size() {
                    return Err(crate::Error::UnexpectedEndOfFrame {
                        requested: Self::size(),
                        remaining,
                    });
                }

                Ok(Self::new_unchecked(buffer))
            }

            /// Create a new reader without checking the buffer length.
            pub fn new_unchecked(buffer: T) -> Self {
                Self { buffer }
            }

            #(#impls)*

            /// Returns the size of this record in bytes.
            pub const fn size() -> usize {
                #offset
            }
        }
    });

    f.into()
}
