//! Helper utility classes (`.h-*`).

use shell_core::Declaration;

/// A helper class and its declarations.
pub struct Helper {
    /// Class name without the leading dot
    pub name: &'static str,
    pub declarations: &'static [(&'static str, &'static str)],
}

impl Helper {
    pub fn selector(&self) -> String {
        format!(".{}", self.name)
    }

    pub fn declarations(&self) -> Vec<Declaration> {
        self.declarations
            .iter()
            .map(|(property, value)| Declaration::new(*property, *value))
            .collect()
    }
}

/// All helpers, in output order.
pub static HELPERS: &[Helper] = &[
    Helper {
        name: "h-hide-visually",
        declarations: &[
            ("position", "absolute"),
            ("width", "1px"),
            ("height", "1px"),
            ("margin", "-1px"),
            ("padding", "0"),
            ("border", "0"),
            ("overflow", "hidden"),
            ("white-space", "nowrap"),
        ],
    },
    Helper {
        name: "h-hide",
        declarations: &[("display", "none")],
    },
    Helper {
        name: "h-show",
        declarations: &[("display", "block")],
    },
    Helper {
        name: "h-text-left",
        declarations: &[("text-align", "left")],
    },
    Helper {
        name: "h-text-center",
        declarations: &[("text-align", "center")],
    },
    Helper {
        name: "h-text-right",
        declarations: &[("text-align", "right")],
    },
    Helper {
        name: "h-float-left",
        declarations: &[("float", "left")],
    },
    Helper {
        name: "h-float-right",
        declarations: &[("float", "right")],
    },
];
