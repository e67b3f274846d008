mod common;
mod declare;

use proc_macro::TokenStream;

/**
Declare command line options from the fields of a struct.

Each named field becomes one option, in field order. `bool` fields become
flags; every other field becomes an option that takes a value of the field's
type. The field's doc comment is its help text.

Fields accept these `#[argtuple(...)]` attributes:

- `long = "name"`: the long name. Defaults to the field name in kebab-case.
- `short` or `short = 'c'`: give the option a short name, either the first
  letter of the field name or the one given.
- `default = expr`: the value to use when the option is absent. String
  literals are converted with `From<&str>`.
- `placeholder = "NAME"`: the value's name in help output. Defaults to the
  field name in SHOUTY_SNAKE_CASE.
*/
#[proc_macro_derive(Declare, attributes(argtuple))]
pub fn derive_declare(item: TokenStream) -> TokenStream {
    match declare::derive_declare_result(item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
