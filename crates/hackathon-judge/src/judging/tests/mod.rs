mod common;
mod routing;
mod signals;
