pub mod strategy;

pub use strategy::{
    InferenceStrategy, PairingStrategy, PlayError, Strategy, StrategyContext, StrategyKind,
    TableAssignment,
};
