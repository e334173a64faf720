pub mod capture;
pub mod depth;
pub mod interaction;
pub mod io;
pub mod keypoints;
pub mod overlay;
pub mod session;
pub mod visualization;
