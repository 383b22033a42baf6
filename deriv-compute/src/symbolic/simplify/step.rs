/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a+a = 2*a`
    AddSelf,

    /// `a-a = 0`
    SubtractSelf,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0-a = -1*a`
    SubtractFromZero,

    /// `a-0 = a`
    SubtractZero,

    /// `2+3 = 5`
    FoldAdd,

    /// `2-3 = -1`
    FoldSubtract,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*3 = 6`
    FoldMultiply,

    /// `a*a = a^2`
    MultiplySelf,

    /// `a/1 = a`
    DivideOne,

    /// `3/4 = 0.75`
    FoldDivide,

    /// `a/a = 1`
    DivideSelf,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `2^3 = 8`
    FoldPower,
}
