//! # Clock Face Scenario Tests
//!
//! End-to-end checks of the model's observable behaviour: dial radius,
//! hand sweep across minute and day boundaries, range arcs, atomic
//! reconfiguration and the redraw cycle driven by a manual clock.
