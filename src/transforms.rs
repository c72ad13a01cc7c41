//! Transform pipeline infrastructure
//!
//! Translation is a chain of stages: tokenize, parse, serialize. Each stage implements
//! [`Runnable`], and [`Transform`] composes them with `.then()`, with the compiler
//! checking that each stage's input matches the previous stage's output:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Tokenization::new(TokenOrder::Source)) // String -> Vec<Token>
//!     .then(Parsing::new())                         // Vec<Token> -> Document
//!     .then(Serialization::xml(TagOptions::default())); // Document -> String
//! let xml = pipeline.run(source)?;
//! ```
//!
//! The default chains are pre-built as statics in [`standard`].

pub mod stages;
pub mod standard;

use crate::error::TranslateError;

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TranslateError>;
}

/// A composable transformation pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TranslateError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TranslateError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TranslateError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TranslateError> {
        Transform::run(self, input)
    }
}
