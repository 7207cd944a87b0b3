mod complex_tests;
