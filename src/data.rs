mod candidate_io;

pub use candidate_io::*;
