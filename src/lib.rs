pub mod core;
pub mod analysis;
pub mod index;
pub mod query;
pub mod scoring;
pub mod search;
pub mod parallel;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                        QUAERO STRUCT ARCHITECTURE                        │
└──────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────── CORE ──────────────────────────────────┐
│                                                                          │
│  ┌──────────────────────────────────────────────────────────────────┐   │
│  │                       struct SearchServer                        │   │
│  │  ┌────────────────────────────────────────────────────────────┐  │   │
│  │  │ stop_words: StopWordSet      // immutable after new()      │  │   │
│  │  │ index: InvertedIndex         // postings + reverse freqs   │  │   │
│  │  │ store: DocumentStore         // metadata + ordered id set  │  │   │
│  │  └────────────────────────────────────────────────────────────┘  │   │
│  └──────────────────────────────────────────────────────────────────┘   │
│                                                                          │
│  ┌──────────────────┐  ┌─────────────────────┐  ┌─────────────────────┐ │
│  │ struct DocId     │  │ enum DocumentStatus │  │ struct Document     │ │
│  │ • 0: i32         │  │ • Actual            │  │ • id: DocId         │ │
│  └──────────────────┘  │ • Irrelevant        │  │ • relevance: f64    │ │
│                        │ • Banned            │  │ • rating: i32       │ │
│                        │ • Removed           │  └─────────────────────┘ │
│                        └─────────────────────┘                          │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── INDEXING ─────────────────────────────────┐
│                                                                          │
│  InvertedIndex                                                           │
│  • postings:  HashMap<String, BTreeMap<DocId, f64>>   term → doc → tf   │
│  • doc_words: HashMap<DocId, BTreeMap<String, f64>>   doc → term → tf   │
│                                                                          │
│  DocumentStore                                                           │
│  • documents: HashMap<DocId, DocumentData>   rating + status            │
│  • ids:       BTreeSet<DocId>                ascending iteration        │
└──────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── SEARCH ──────────────────────────────────┐
│                                                                          │
│  raw query ── parse_query ──> Query { plus_words, minus_words }          │
│                                                                          │
│  find_all_documents (scoring::tf_idf)                                    │
│  • sequential: BTreeMap accumulator                                      │
│  • parallel:   ConcurrentMap (striped, parking_lot) + rayon              │
│                                                                          │
│  sort_and_truncate (search::results)                                     │
│  • relevance desc, 1e-6 epsilon tie-break on rating desc, top 5          │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── WRAPPERS ─────────────────────────────────┐
│                                                                          │
│  process_queries / process_queries_joined   rayon batch, input order     │
│  remove_duplicates                          term-set equality scan       │
│  RequestQueue                               rolling-window miss counter  │
│  paginate                                   fixed-size result pages      │
└──────────────────────────────────────────────────────────────────────────┘
*/
