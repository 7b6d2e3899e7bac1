mod source;
mod splice;
