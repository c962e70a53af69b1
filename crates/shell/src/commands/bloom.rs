//! The `bloom` subcommand.

use aligners::BloomFilter;

/// Arguments for the `bloom` subcommand.
#[derive(clap::Args, Debug)]
pub struct BloomArgs {
    /// The number of slots in the filter.
    #[arg(short('m'), long, default_value_t = 1 << 16)]
    size: usize,

    /// The number of hash functions.
    #[arg(short('k'), long, default_value_t = 3)]
    hashes: usize,

    /// The length of the k-mers.
    #[arg(short('w'), long, default_value_t = 11)]
    kmer: usize,

    /// The sequence whose k-mers are added to the filter.
    #[arg(short('r'), long)]
    reference: String,

    /// The sequence whose k-mers are looked up in the filter.
    #[arg(short('q'), long)]
    query: String,

    /// The seed from which the hash functions are drawn.
    #[arg(short('s'), long, default_value_t = 42)]
    seed: u64,
}

/// Builds the filter from the reference and reports the query's hits.
pub fn run(args: &BloomArgs) -> Result<(), String> {
    if args.kmer == 0 {
        return Err("The k-mer length must be positive".to_string());
    }

    let mut filter = BloomFilter::new(args.size, args.hashes, args.seed)?;

    let reference = args.reference.as_bytes();
    filter.insert_kmers(reference, args.kmer);
    let num_kmers = reference.len().checked_sub(args.kmer).map_or(0, |n| n + 1);
    ftlog::info!(
        "Added {num_kmers} {}-mers to a filter with {} slots, {} of them set",
        args.kmer,
        filter.size(),
        filter.count_set_bits()
    );

    let query = args.query.as_bytes();
    let hits = filter.kmer_hits(query, args.kmer);
    let num_hits = hits.iter().filter(|&&hit| hit).count();

    println!("k-mers in query: {}", hits.len());
    println!("Possible hits: {num_hits}");
    println!(
        "Expected false positive rate: {:.6}",
        filter.false_positive_rate(num_kmers)
    );
    for (i, hit) in hits.iter().enumerate() {
        if *hit {
            println!("{i}\t{}", String::from_utf8_lossy(&query[i..i + args.kmer]));
        }
    }

    Ok(())
}
