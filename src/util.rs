use crate::token::Symbol;
use hashbrown::HashMap;

/// Functions callable from a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `abs(x)`
    Abs,
    /// `log(x)`, natural logarithm
    Log,
    /// `exp(x)`
    Exp,
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `asin(x)`
    Asin,
    /// `acos(x)`
    Acos,
    /// `sinh(x)`
    Sinh,
    /// `cosh(x)`
    Cosh,
    /// `tanh(x)`
    Tanh,
    /// `asinh(x)`
    Asinh,
    /// `acosh(x)`
    Acosh,
    /// `atanh(x)`
    Atanh,
    /// `ceil(x)`
    Ceil,
    /// `floor(x)`
    Floor,
    /// `max(a, b)`
    Max,
    /// `min(a, b)`
    Min,
    /// `pow(a, b)`
    Pow,
    /// `atan2(y, x)`
    Atan2,
}

impl Function {
    /// Every function, in no particular order
    pub const ALL: [Self; 20] = [
        Self::Abs,
        Self::Log,
        Self::Exp,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Asinh,
        Self::Acosh,
        Self::Atanh,
        Self::Ceil,
        Self::Floor,
        Self::Max,
        Self::Min,
        Self::Pow,
        Self::Atan2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Max => "max",
            Self::Min => "min",
            Self::Pow => "pow",
            Self::Atan2 => "atan2",
        }
    }

    /// Number of arguments the function takes
    pub fn arity(self) -> usize {
        match self {
            Self::Max | Self::Min | Self::Pow | Self::Atan2 => 2,
            _ => 1,
        }
    }

    /// Call the function with `args`, in formal argument order. Returns
    /// `None` if the number of arguments does not match the arity.
    pub fn apply(self, args: &[f64]) -> Option<f64> {
        let value = match (self, args) {
            (Self::Abs, &[x]) => libm::fabs(x),
            (Self::Log, &[x]) => libm::log(x),
            (Self::Exp, &[x]) => libm::exp(x),
            (Self::Sin, &[x]) => libm::sin(x),
            (Self::Cos, &[x]) => libm::cos(x),
            (Self::Tan, &[x]) => libm::tan(x),
            (Self::Asin, &[x]) => libm::asin(x),
            (Self::Acos, &[x]) => libm::acos(x),
            (Self::Sinh, &[x]) => libm::sinh(x),
            (Self::Cosh, &[x]) => libm::cosh(x),
            (Self::Tanh, &[x]) => libm::tanh(x),
            (Self::Asinh, &[x]) => libm::asinh(x),
            (Self::Acosh, &[x]) => libm::acosh(x),
            (Self::Atanh, &[x]) => libm::atanh(x),
            (Self::Ceil, &[x]) => libm::ceil(x),
            (Self::Floor, &[x]) => libm::floor(x),
            (Self::Max, &[a, b]) => libm::fmax(a, b),
            (Self::Min, &[a, b]) => libm::fmin(a, b),
            (Self::Pow, &[a, b]) => libm::pow(a, b),
            (Self::Atan2, &[a, b]) => libm::atan2(a, b),
            _ => return None,
        };
        Some(value)
    }
}

lazy_static! {
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::with_capacity(Function::ALL.len());
        for &function in &Function::ALL {
            map.insert(function.name(), function);
        }
        map
    };

    /// Operator symbols, longest lexeme first so that `<=` wins over `<`
    pub static ref SYMBOLS: Vec<Symbol> = {
        let mut symbols = Symbol::ALL.to_vec();
        symbols.sort_by(|a, b| b.lexeme().len().cmp(&a.lexeme().len()));
        symbols
    };
}

/// Get the name of the variable with the 1-based `index`: `A` to `Z`, then
/// `AA`, `AB`, ... The name of index 0 is empty.
///
/// # Examples
///
/// ```
/// # use mathex::variable_name;
/// assert_eq!(variable_name(1), "A");
/// assert_eq!(variable_name(27), "AA");
/// assert_eq!(variable_name(703), "AAA");
/// ```
#[must_use]
pub fn variable_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = index;
    while rest > 0 {
        rest -= 1;
        letters.push(b'A' + (rest % 26) as u8);
        rest /= 26;
    }
    letters.iter().rev().map(|&c| c as char).collect()
}

/// Get the 1-based index of the variable called `name`, or `None` if `name`
/// is not a run of uppercase ASCII letters or is too long to be indexed.
///
/// # Examples
///
/// ```
/// # use mathex::variable_index;
/// assert_eq!(variable_index("B"), Some(2));
/// assert_eq!(variable_index("AB"), Some(28));
/// assert_eq!(variable_index("a"), None);
/// ```
#[must_use]
pub fn variable_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    name.chars().try_fold(0_usize, |index, c| {
        if !c.is_ascii_uppercase() {
            return None;
        }
        let digit = (c as usize) - ('A' as usize) + 1;
        index.checked_mul(26)?.checked_add(digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1 => "A" ; "first")]
    #[test_case(26 => "Z" ; "last single letter")]
    #[test_case(27 => "AA" ; "first double letter")]
    #[test_case(52 => "AZ" ; "end of first double block")]
    #[test_case(53 => "BA" ; "second double block")]
    #[test_case(702 => "ZZ" ; "last double letter")]
    #[test_case(703 => "AAA" ; "first triple letter")]
    fn name(index: usize) -> String {
        variable_name(index)
    }

    #[test]
    fn names_and_indexes_agree() {
        for index in 1..2000 {
            assert_eq!(variable_index(&variable_name(index)), Some(index));
        }
    }

    #[test]
    fn invalid_indexes() {
        assert_eq!(variable_index(""), None);
        assert_eq!(variable_index("Ab"), None);
        assert_eq!(variable_index("A1"), None);
        assert_eq!(variable_index(&"Z".repeat(40)), None);
    }

    #[test]
    fn symbols_sorted_longest_first() {
        let lengths: Vec<_> = SYMBOLS.iter().map(|s| s.lexeme().len()).collect();
        assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(SYMBOLS.len(), Symbol::ALL.len());
    }

    #[test]
    fn functions() {
        assert_eq!(FUNCTIONS.get("atan2"), Some(&Function::Atan2));
        assert_eq!(FUNCTIONS.get("trunc"), None);
        assert_eq!(Function::Max.apply(&[1.0, 2.0]), Some(2.0));
        assert_eq!(Function::Atan2.apply(&[1.0, 1.0]), Some(libm::atan2(1.0, 1.0)));
        assert_eq!(Function::Abs.apply(&[-5.0]), Some(5.0));
        assert_eq!(Function::Abs.apply(&[1.0, 2.0]), None);
        assert_eq!(Function::Pow.apply(&[2.0]), None);
    }
}
