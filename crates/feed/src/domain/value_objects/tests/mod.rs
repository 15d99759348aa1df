mod media_type_test;
