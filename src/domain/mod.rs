// Domain layer: value types shared by the formatting utilities and templates.

pub mod model;
