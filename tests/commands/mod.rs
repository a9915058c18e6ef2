mod test_resolve;
