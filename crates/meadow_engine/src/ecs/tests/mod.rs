//! Whole-frame tests driving a composed scene through the engine

mod frame_integration;
