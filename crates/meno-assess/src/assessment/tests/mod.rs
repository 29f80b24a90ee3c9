mod common;
mod flags;
mod pathway;
mod risk;
mod routing;
