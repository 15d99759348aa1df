mod handle_test;
