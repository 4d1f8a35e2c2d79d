//! End-to-end tests for the DSS error boundary live under `tests/`
