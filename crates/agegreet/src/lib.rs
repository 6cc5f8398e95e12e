//! agegreet - interactive greeter with age-bracket classification
//!
//! Library surface behind the `agegreet` binary. The interactive pieces are
//! generic over `BufRead`/`Write` so whole sessions can be driven against
//! in-memory streams in tests.

pub mod bracket;
pub mod errors;
pub mod prompt;
pub mod session;

pub use bracket::AgeBracket;
pub use errors::InputError;
pub use session::{run, SessionOutcome};
