mod relocations;
