//! Unit tests for board arrangement, presentation, and drag planning.
