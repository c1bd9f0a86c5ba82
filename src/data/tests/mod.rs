mod market;
