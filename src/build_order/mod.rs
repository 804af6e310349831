/// Build order domain: dependency inventory, trees and their flattening
///
/// Pure business logic with no I/O. Parsing of tool output, tree
/// construction and flattening all live here.
pub mod domain;
pub mod services;
