#[derive(Debug, Clone, PartialEq, Fail)]
pub enum RenderError {
    #[fail(display = "Triangle has zero area")]
    DegenerateTriangle,
    #[fail(display = "Division by zero, W must be non-zero")]
    DivisionByZero,
    #[fail(display = "Coordinate {} is outside the representable range of +/-2048.0", _0)]
    CoordinateOverflow(f64),
    #[fail(display = "Quotient does not fit in Q16.16")]
    QuotientOverflow,
}

pub type RenderResult<T> = Result<T, RenderError>;
