mod test_properties;
mod test_undo;
