/// Actions an observer can take during a boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the best passing value found so far.
    StopEarly,

    /// Treat this candidate as passing, whatever the evaluation said.
    ///
    /// If the evaluation did not actually pass, the solution will carry no
    /// snapshot for this candidate.
    AssumePass,

    /// Treat this candidate as failing, whatever the evaluation said.
    ///
    /// Use this to recover from model or problem errors when a failed run
    /// means the candidate is infeasible, such as a router that crashes on
    /// channel widths too narrow to route.
    AssumeFail,
}
