mod property_lossless;
