//! `AssemblyAI` transcription API

pub mod client;

pub use client::{AssemblyAiClient, SPEECH_MODEL};
