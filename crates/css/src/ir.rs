use shell_core::types::format_magnitude;
use shell_core::{Declaration, Number as ShellNumber, Unit, Value};
use swc_common::DUMMY_SP;
use swc_css_ast::{
    ClassSelector, ComplexSelector, ComplexSelectorChildren, ComponentValue, CompoundSelector,
    Declaration as SwcDeclaration, DeclarationName, Dimension, Ident, Length, Number, Percentage,
    QualifiedRule, QualifiedRulePrelude, Rule, SelectorList, SimpleBlock, Stylesheet,
    SubclassSelector, Token, TokenAndSpan,
};

/// 基础规则：类名 + 声明列表（不含 @media）
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRule {
    /// 类名，带不带前导 `.` 均可
    pub class_name: String,
    pub declarations: Vec<Declaration>,
}

impl ClassRule {
    pub fn new(class_name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            class_name: class_name.into(),
            declarations,
        }
    }
}

fn ident(value: &str) -> Ident {
    Ident {
        span: DUMMY_SP,
        value: value.into(),
        raw: Some(value.into()),
    }
}

fn number(n: f64) -> Number {
    let raw = format_magnitude(n);
    Number {
        span: DUMMY_SP,
        value: n,
        raw: Some(raw.into()),
    }
}

/// 单个值 token → ComponentValue
///
/// - `1px` / `1.5rem` / `2em` → Dimension
/// - `50%` → Percentage
/// - `0` → Number
/// - 其它 → Ident
fn component_value(token: &str) -> ComponentValue {
    match Value::from(token) {
        Value::Number(ShellNumber { value, unit: None }) => {
            ComponentValue::Number(Box::new(number(value)))
        }
        Value::Number(ShellNumber {
            value,
            unit: Some(Unit::Percent),
        }) => ComponentValue::Percentage(Box::new(Percentage {
            span: DUMMY_SP,
            value: number(value),
        })),
        Value::Number(ShellNumber {
            value,
            unit: Some(unit),
        }) => ComponentValue::Dimension(Box::new(Dimension::Length(Length {
            span: DUMMY_SP,
            value: number(value),
            unit: ident(unit.as_str()),
        }))),
        Value::Ident(s) => ComponentValue::Ident(Box::new(ident(&s))),
    }
}

/// 从 Declaration 创建 SWC CSS Declaration
///
/// 以空白分隔的多值（如 `0 auto`）拆成多个 ComponentValue。
pub fn create_swc_declaration(decl: &Declaration) -> SwcDeclaration {
    SwcDeclaration {
        span: DUMMY_SP,
        name: DeclarationName::Ident(ident(&decl.property)),
        value: decl.value.split_whitespace().map(component_value).collect(),
        important: None,
    }
}

/// 创建类选择器
pub fn create_class_selector(class_name: &str) -> ComplexSelector {
    let class_selector = ClassSelector {
        span: DUMMY_SP,
        text: ident(class_name.trim_start_matches('.')),
    };

    let compound_selector = CompoundSelector {
        span: DUMMY_SP,
        nesting_selector: None,
        type_selector: None,
        subclass_selectors: vec![SubclassSelector::Class(class_selector)],
    };

    ComplexSelector {
        span: DUMMY_SP,
        children: vec![ComplexSelectorChildren::CompoundSelector(compound_selector)],
    }
}

/// 从 ClassRule 创建 CSS 规则
pub fn create_qualified_rule(rule: &ClassRule) -> QualifiedRule {
    let selector_list = SelectorList {
        span: DUMMY_SP,
        children: vec![create_class_selector(&rule.class_name)],
    };

    let block = SimpleBlock {
        span: DUMMY_SP,
        name: TokenAndSpan {
            span: DUMMY_SP,
            token: Token::LBrace,
        },
        value: rule
            .declarations
            .iter()
            .map(|decl| ComponentValue::Declaration(Box::new(create_swc_declaration(decl))))
            .collect(),
    };

    QualifiedRule {
        span: DUMMY_SP,
        prelude: QualifiedRulePrelude::SelectorList(selector_list),
        block,
    }
}

/// 按顺序把规则放进一个样式表，跳过没有声明的规则
pub fn create_stylesheet(rules: &[ClassRule]) -> Stylesheet {
    Stylesheet {
        span: DUMMY_SP,
        rules: rules
            .iter()
            .filter(|rule| !rule.declarations.is_empty())
            .map(|rule| Rule::QualifiedRule(Box::new(create_qualified_rule(rule))))
            .collect(),
    }
}
