use std::collections::HashMap;

/// A context to use when evaluating an expression, containing the values of the symbols that can
/// be used within the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("e".to_string(), std::f64::consts::E),
                ("pi".to_string(), std::f64::consts::PI),
                ("tau".to_string(), std::f64::consts::TAU),
            ]),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// Unlike the [`Default`] implementation, the empty context does not contain the constants
    /// `e`, `pi` and `tau`.
    pub fn new() -> Ctxt {
        Ctxt {
            vars: HashMap::new(),
        }
    }

    /// Add a variable to the context, replacing its previous value if there was one.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }
}
