mod reader_test;
