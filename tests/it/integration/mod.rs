//! Multi-component workflow tests driven through raw input events.
