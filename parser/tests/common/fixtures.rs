//! Markup as served by a stock MangaStream theme, cut down to what the
//! selectors look at.

pub const SERIES: &str = r#"
<html><body>
<div class="bigcontent">
    <div class="thumb">
        <img src="data:image/svg+xml;base64,AAAA" data-lazy-src="https://flamescans.org/wp-content/uploads/law.jpg">
    </div>
    <div class="infox">
        <h1 class="entry-title">This Is the Law</h1>
        <div class="wd-full"><b>Alternative Titles</b> <span>법대로 사는 법, The Law of Life; This Is the Law</span></div>
        <div class="rating-prc"><div class="num">9.2</div></div>
        <div class="imptdt">Status <i>Ongoing</i></div>
        <div class="fmed"><b>Author</b> <span>Cheong Gyeong</span></div>
        <div class="fmed"><b>Artist</b> <span>-</span></div>
        <span class="mgen">
            <a href="https://flamescans.org/genres/action/">Action</a>
            <a href="/genres/drama/">Drama</a>
        </span>
        <div class="entry-content entry-content-single" itemprop="description">
            <p>A lawyer
               returns.</p>
        </div>
    </div>
</div>
<div id="chapterlist"><ul>
    <li data-num="1.5">
        <a href="https://flamescans.org/this-is-the-law-chapter-1-5/">
            <span class="chapternum">Chapter 1.5</span><span class="chapterdate">April 27, 2021</span>
        </a>
    </li>
    <li data-num="2">
        <a href="https://flamescans.org/this-is-the-law-chapter-2/">
            <span class="chapternum">Chapter 2</span><span class="chapterdate">May 4, 2021</span>
        </a>
    </li>
    <li>
        <a href="/this-is-the-law-chapter-1/">
            <span class="chapternum">Chapter 1</span><span class="chapterdate">April 20, 2021</span>
        </a>
    </li>
    <li><span class="chapternum">Chapter 0</span></li>
</ul></div>
</body></html>
"#;

pub const BARE_SERIES: &str = r#"
<html><body>
<div class="bigcontent"><div class="thumb"></div></div>
<div id="chapterlist"><ul></ul></div>
</body></html>
"#;

pub const READER_SCRIPT: &str = r#"
<html><body>
<div id="readerarea"><noscript><img src="https://flamescans.org/wrong.jpg"></noscript></div>
<script>ts_reader.run({"prevUrl":"","nextUrl":"","sources":[{"source":"Server 1","images":["https:\/\/cdn.flamescans.org\/law\/1\/001.jpg","https:\/\/cdn.flamescans.org\/law\/1\/002.jpg"]}]});</script>
</body></html>
"#;

pub const READER_IMAGES: &str = r#"
<html><body>
<div id="readerarea">
    <p><img data-src="/law/2/001.jpg" src="data:image/gif;base64,R0lGOD"></p>
    <p><img src="https://cdn.flamescans.org/law/2/002.jpg"></p>
</div>
</body></html>
"#;

pub const BROKEN_READER_SCRIPT: &str = r#"
<html><body>
<script>var reader = ts_reader.run}; start({</script>
<div id="readerarea"><img src="https://cdn.flamescans.org/law/4/001.jpg"></div>
</body></html>
"#;

pub const EMPTY_READER: &str = r#"
<html><body><div id="readerarea"></div></body></html>
"#;

pub const HOME: &str = r#"
<html><body>
<div class="bixbox hothome">
    <div class="releases"><h2>Popular Today</h2></div>
    <div class="listupd">
        <div class="bs"><div class="bsx">
            <a href="https://flamescans.org/series/this-is-the-law/" title="This Is the Law">
                <img src="https://flamescans.org/law.jpg">
                <div class="tt">This Is the Law</div>
                <div class="epxs">Chapter 3</div>
            </a>
        </div></div>
        <div class="bs"><div class="bsx">
            <a href="https://flamescans.org/series/omniscient-reader/" title="Omniscient Reader">
                <img src="https://flamescans.org/orv.jpg">
                <div class="tt">Omniscient Reader</div>
                <div class="epxs">Chapter 120</div>
            </a>
        </div></div>
    </div>
</div>
<div class="bixbox">
    <div class="releases"><h2>Latest Update</h2></div>
    <div class="listupd"><div class="utao">
        <div class="uta">
            <div class="imgu"><a class="series" href="https://flamescans.org/series/the-law-of-life/"><img src="https://flamescans.org/life.jpg"></a></div>
            <div class="luf">
                <a class="series" href="https://flamescans.org/series/the-law-of-life/"><h4>The Law of Life</h4></a>
                <ul><li><a href="https://flamescans.org/the-law-of-life-chapter-7/">Chapter 7</a><span>2 hours ago</span></li></ul>
            </div>
        </div>
    </div></div>
</div>
<div class="section">
    <div class="releases"><h3>New Series</h3></div>
    <ul>
        <li><a class="series" href="https://flamescans.org/series/fresh-start/"><img src="https://flamescans.org/fresh.jpg"></a><h2><a class="series" href="https://flamescans.org/series/fresh-start/">Fresh Start</a></h2></li>
    </ul>
</div>
<div class="serieslist pop wpop wpop-weekly"><ul>
    <li><div class="imgseries"><a class="series" href="https://flamescans.org/series/omniscient-reader/"><img src="https://flamescans.org/orv.jpg"></a></div><div class="leftseries"><h2><a class="series" href="https://flamescans.org/series/omniscient-reader/">Omniscient Reader</a></h2></div></li>
</ul></div>
<div class="serieslist pop wpop wpop-monthly"><ul>
    <li><div class="imgseries"><a class="series" href="https://flamescans.org/series/this-is-the-law/"><img src="https://flamescans.org/law.jpg"></a></div><div class="leftseries"><h2><a class="series" href="https://flamescans.org/series/this-is-the-law/">This Is the Law</a></h2></div></li>
</ul></div>
<div class="serieslist pop wpop wpop-alltime"><ul>
    <li><div class="imgseries"><a class="series" href="https://flamescans.org/series/omniscient-reader/"><img src="https://flamescans.org/orv.jpg"></a></div><div class="leftseries"><h2><a class="series" href="https://flamescans.org/series/omniscient-reader/">Omniscient Reader</a></h2></div></li>
    <li><div class="imgseries"><a class="series" href="https://flamescans.org/series/this-is-the-law/"><img src="https://flamescans.org/law.jpg"></a></div><div class="leftseries"><h2><a class="series" href="https://flamescans.org/series/this-is-the-law/">This Is the Law</a></h2></div></li>
</ul></div>
<ul class="genre">
    <li><a href="https://flamescans.org/genres/action/">Action</a></li>
    <li><a href="https://flamescans.org/genres/martial-arts/">Martial Arts</a></li>
    <li><a href="https://flamescans.org/genres/action/">Action</a></li>
</ul>
</body></html>
"#;

pub const EMPTY_LISTING: &str = r#"
<html><body><div class="listupd"><h3>Nothing Found</h3></div></body></html>
"#;

/// A search or listing page with one `div.bsx` tile per (id, title)
pub fn tile_grid(tiles: &[(&str, &str)]) -> String {
    let tiles: String = tiles
        .iter()
        .map(|(id, title)| {
            format!(
                r#"<div class="bs"><div class="bsx">
                    <a href="https://flamescans.org/series/{id}/" title="{title}">
                        <img src="https://flamescans.org/covers/{id}.jpg">
                        <div class="tt">{title}</div>
                        <div class="epxs">Chapter 1</div>
                    </a>
                </div></div>"#
            )
        })
        .collect();
    format!(r#"<html><body><div class="listupd">{tiles}</div></body></html>"#)
}

/// A "latest update" feed page with one row per (id, chapter, date)
pub fn update_feed(rows: &[(&str, u32, &str)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(id, chapter, date)| {
            format!(
                r#"<div class="uta">
                    <div class="imgu"><a class="series" href="https://flamescans.org/series/{id}/"><img src="https://flamescans.org/covers/{id}.jpg"></a></div>
                    <div class="luf">
                        <a class="series" href="https://flamescans.org/series/{id}/"><h4>{id}</h4></a>
                        <ul>
                            <li><a href="https://flamescans.org/{id}-chapter-{chapter}/">Chapter {chapter}</a><span>{date}</span></li>
                        </ul>
                    </div>
                </div>"#
            )
        })
        .collect();
    format!(r#"<html><body><div class="listupd"><div class="utao">{rows}</div></div></body></html>"#)
}
