//! Identifier derivation for generated source.
//!
//! | Input name | Type identifier | Params type     | Binding      |
//! |------------|-----------------|-----------------|--------------|
//! | `weather`  | `Weather`       | `WeatherParams` | `weatherAPI` |
//! | `orders`   | `Orders`        | `OrdersParams`  | `ordersAPI`  |

use std::fmt;

/// Capitalized endpoint name used as a prefix for generated type names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeIdentifier(String);

impl TypeIdentifier {
    /// Derive the identifier: first character upper-cased, the rest
    /// lower-cased. An empty name derives an empty identifier.
    pub fn derive(name: &str) -> Self {
        let mut chars = name.chars();
        let ident = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
        Self(ident)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<Ident>Params`
    pub fn params_type(&self) -> String {
        format!("{}Params", self.0)
    }

    /// `<Ident>Response`
    pub fn response_type(&self) -> String {
        format!("{}Response", self.0)
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the default-exported module binding: `<name>API`.
pub fn binding_name(name: &str) -> String {
    format!("{name}API")
}
