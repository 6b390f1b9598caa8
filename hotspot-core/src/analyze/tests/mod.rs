mod analyze_file_tests;
