mod generator;
mod support;
