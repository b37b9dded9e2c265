use thiserror::Error;

/// Faults reported by the engine. None of them leave the machine
/// in an unusable state; stepping may continue afterwards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("invalid stack state: {0}")]
    Stack(#[from] StackError),
    #[error("could not load program: {0}")]
    Load(#[from] LoadError),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum StackError {
    /// A call was made with every stack slot in use. The call was skipped.
    #[error("stack is full")]
    Overflow,
    /// A return was made with an empty stack. The return was skipped.
    #[error("stack is empty")]
    Underflow,
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadError {
    #[error("program is {len} bytes, at most {max} fit in memory")]
    ProgramTooLarge { len: usize, max: usize },
}
