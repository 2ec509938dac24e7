/// Defines a boundary problem to be searched.
///
/// A boundary problem maps an integer candidate into a model input, then
/// decides from the model input and output whether the candidate passes.
/// Boundary searches look for the smallest (or largest) passing candidate.
///
/// The pass/fail verdict is expected to be monotonic in the candidate: for a
/// lower-bound search there is some threshold `T` below which every candidate
/// fails and at or above which every candidate passes (mirrored for an
/// upper-bound search). This is not checked.
pub trait BoundaryProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps a candidate value into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed.
    fn input(&self, candidate: i64) -> Result<Self::Input, Self::Error>;

    /// Decides whether the model call for a candidate passed.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the verdict cannot be computed.
    fn passes(&self, input: &Self::Input, output: &Self::Output) -> Result<bool, Self::Error>;
}
