// Parser test modules
//
// Selector syntax cases and the NRQL conditions they translate to.

pub mod selector_tests;
